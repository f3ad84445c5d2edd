// piecewise functions of one variable, built over RustedSciThe expressions
pub mod ccode;
pub mod piecewise;

pub use RustedSciThe::symbolic::symbolic_engine::Expr;
pub use self::ccode::ccode;
pub use self::piecewise::{Bindings, Cond, Piecewise, constant_value, evaluate, substitute};
