pub use self::costs::*;

pub use self::fleet::*;

pub use self::jobs::*;
