/// Alias to a scalar floating type.
pub type Float = f64;

/// Represents a time duration.
pub type Duration = Float;

/// Represents a timestamp.
pub type Timestamp = Float;

/// Represents a distance.
pub type Distance = Float;

/// Specifies cost value.
pub type Cost = Float;
