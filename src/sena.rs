// transfer functions of the Sena waveshaper
use std::fmt;
use super::symbolic::{Bindings, Cond, Expr, Piecewise};

pub const X: &str = "x";
/// slope count
pub const M: &str = "m";
/// threshold
pub const T: &str = "t";
/// clamp value
pub const C: &str = "c";
/// slope of the clamped segments
pub const D: &str = "d";

fn sym(name: &str) -> Expr {
    Expr::Var(name.to_string())
}

fn num(v: f64) -> Expr {
    Expr::Const(v)
}

fn neg(e: Expr) -> Expr {
    num(-1.0) * e
}

/// `(m + 1)*t - m*x`: the falling segment past the threshold.
pub fn h(x: Expr) -> Expr {
    (sym(M) + num(1.0)) * sym(T) - sym(M) * x
}

/// Identity inside `[-t, t]`, folding back with slope `-m` outside; odd in `x`.
pub fn ramp() -> Piecewise {
    let x = sym(X);
    Piecewise::new(vec![
        (h(x.clone()), Cond::Greater(x.clone(), sym(T))),
        (neg(h(neg(x.clone()))), Cond::Less(x.clone(), neg(sym(T)))),
        (x, Cond::Always),
    ])
}

/// Identity inside `(-1, 1)`, then slope `-d` segments limited to `c` and `-c`.
pub fn clamped() -> Piecewise {
    let x = sym(X);
    let c = sym(C);
    let d = sym(D);
    let falling = d.clone() + num(1.0) - d.clone() * x.clone();
    Piecewise::new(vec![
        (c.clone(), Cond::Greater(neg(d.clone()) * (x.clone() + num(1.0)) - num(1.0), c.clone())),
        (neg(d.clone()) * x.clone() - (d + num(1.0)), Cond::Less(x.clone(), num(-1.0))),
        (x.clone(), Cond::Less(x, num(1.0))),
        (falling.clone(), Cond::Greater(falling, neg(c.clone()))),
        (neg(c), Cond::Always),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SenaParams {
    pub m: f64,
    pub t: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for SenaParams {
    fn default() -> Self {
        SenaParams{m: 8.0, t: 0.75, c: 0.1, d: 1.5}
    }
}

impl SenaParams {
    fn pairs(&self) -> [(&'static str, f64); 4] {
        [(M, self.m), (T, self.t), (C, self.c), (D, self.d)]
    }
    pub fn bindings(&self) -> Bindings {
        self.pairs().iter().map(|(s, v)| (s.to_string(), *v)).collect()
    }
    /// `bindings()` plus a value for `x`.
    pub fn at(&self, x: f64) -> Bindings {
        let mut ret = self.bindings();
        ret.insert(X.to_string(), x);
        ret
    }
    pub fn bind(&self, e: &Piecewise) -> Piecewise {
        self.pairs().iter().fold(e.clone(), |acc, (s, v)| acc.set_variable(s, *v))
    }
}

impl fmt::Display for SenaParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={}, t={}, c={}, d={}", self.m, self.t, self.c, self.d)
    }
}
