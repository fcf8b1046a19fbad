//! Shapes supported by obbsat3d.

pub use self::rigid_box::{RigidBox, RigidBoxError};

mod rigid_box;
