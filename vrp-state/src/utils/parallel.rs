use rayon::prelude::*;

/// Maps mutable collection into a new vec in parallel keeping original order.
pub fn parallel_map_mut<T, F, R>(source: &mut [T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&mut T) -> R + Send + Sync,
    R: Send,
{
    source.par_iter_mut().map(map_op).collect()
}
