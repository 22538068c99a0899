//! Type classes for functional programming.
//!
//! Traits that describe the shared behaviour of the containers in this
//! crate:
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation via GAT
//! - [`Functor`] / [`FunctorMut`]: mapping over values
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: reducing a structure to a summary value
//!
//! The implementations live next to the types they describe
//! (`control` and `persistent`).

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
