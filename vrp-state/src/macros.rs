//! Provides some useful macros to avoid repetitive code.

/// A macro to define typed access to an activity state on [crate::construction::states::StateManager].
macro_rules! activity_state_accessor {
    ($name:ident typeof $type:ty = $state:expr) => {
        paste::paste! {
            #[doc = " Extends [StateManager] within a new ["[<$name ActivityState>]"]."]
            pub trait [<$name ActivityState>] {
                #[doc = " Gets `"$name "` activity state."]
                fn [<get_ $name:snake:lower _at>](&self, activity: ActivityId) -> StateResult<&$type>;
                #[doc = " Sets `"$name "` activity state."]
                fn [<set_ $name:snake:lower _at>](&mut self, activity: ActivityId, value: $type);
            }

            impl [<$name ActivityState>] for StateManager {
                fn [<get_ $name:snake:lower _at>](&self, activity: ActivityId) -> StateResult<&$type> {
                    self.get_activity_state($state, activity)
                }

                fn [<set_ $name:snake:lower _at>](&mut self, activity: ActivityId, value: $type) {
                    self.put_activity_state($state, activity, value)
                }
            }
        }
    };
}

/// A macro to define typed access to a vehicle dependent activity state on
/// [crate::construction::states::StateManager].
macro_rules! activity_vehicle_state_accessor {
    ($name:ident typeof $type:ty = $state:expr) => {
        paste::paste! {
            #[doc = " Extends [StateManager] within a new ["[<$name VehicleActivityState>]"]."]
            pub trait [<$name VehicleActivityState>] {
                #[doc = " Gets `"$name "` activity state for given vehicle."]
                fn [<get_ $name:snake:lower _for>](&self, activity: ActivityId, vehicle: VehicleIdx) -> StateResult<&$type>;
                #[doc = " Sets `"$name "` activity state for given vehicle."]
                fn [<set_ $name:snake:lower _for>](&mut self, activity: ActivityId, vehicle: VehicleIdx, value: $type);
            }

            impl [<$name VehicleActivityState>] for StateManager {
                fn [<get_ $name:snake:lower _for>](&self, activity: ActivityId, vehicle: VehicleIdx) -> StateResult<&$type> {
                    self.get_activity_vehicle_state($state, activity, vehicle)
                }

                fn [<set_ $name:snake:lower _for>](&mut self, activity: ActivityId, vehicle: VehicleIdx, value: $type) {
                    self.put_activity_vehicle_state($state, activity, vehicle, value)
                }
            }
        }
    };
}

/// A macro to define typed access to a route state on [crate::construction::states::StateManager].
macro_rules! route_state_accessor {
    ($name:ident typeof $type:ty = $state:expr) => {
        paste::paste! {
            #[doc = " Extends [StateManager] within a new ["[<$name RouteState>]"]."]
            pub trait [<$name RouteState>] {
                #[doc = " Gets `"$name "` route state."]
                fn [<get_ $name:snake:lower>](&self, route: RouteId) -> StateResult<&$type>;
                #[doc = " Sets `"$name "` route state."]
                fn [<set_ $name:snake:lower>](&mut self, route: RouteId, value: $type);
            }

            impl [<$name RouteState>] for StateManager {
                fn [<get_ $name:snake:lower>](&self, route: RouteId) -> StateResult<&$type> {
                    self.get_route_state($state, route)
                }

                fn [<set_ $name:snake:lower>](&mut self, route: RouteId, value: $type) {
                    self.put_route_state($state, route, value)
                }
            }
        }
    };
}

/// A macro to define typed access to a vehicle dependent route state on
/// [crate::construction::states::StateManager].
macro_rules! route_vehicle_state_accessor {
    ($name:ident typeof $type:ty = $state:expr) => {
        paste::paste! {
            #[doc = " Extends [StateManager] within a new ["[<$name VehicleRouteState>]"]."]
            pub trait [<$name VehicleRouteState>] {
                #[doc = " Gets `"$name "` route state for given vehicle."]
                fn [<get_ $name:snake:lower _for>](&self, route: RouteId, vehicle: VehicleIdx) -> StateResult<&$type>;
                #[doc = " Sets `"$name "` route state for given vehicle."]
                fn [<set_ $name:snake:lower _for>](&mut self, route: RouteId, vehicle: VehicleIdx, value: $type);
            }

            impl [<$name VehicleRouteState>] for StateManager {
                fn [<get_ $name:snake:lower _for>](&self, route: RouteId, vehicle: VehicleIdx) -> StateResult<&$type> {
                    self.get_route_vehicle_state($state, route, vehicle)
                }

                fn [<set_ $name:snake:lower _for>](&mut self, route: RouteId, vehicle: VehicleIdx, value: $type) {
                    self.put_route_vehicle_state($state, route, vehicle, value)
                }
            }
        }
    };
}
