pub mod constants;
pub mod content;
pub mod error;
pub mod mystery;
pub mod plan;
pub mod prayer;
pub mod scheduler;
pub mod session;
pub mod structure;
pub mod timing;

pub use content::*;
pub use error::*;
pub use mystery::*;
pub use plan::*;
pub use prayer::*;
pub use scheduler::*;
pub use session::*;
pub use structure::*;
pub use timing::*;
