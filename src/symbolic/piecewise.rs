use std::collections::BTreeMap;
use std::fmt;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use crate::error::SymbolicError;
use super::ccode::ccode;

/// Numeric values for named symbols.
pub type Bindings = BTreeMap<String, f64>;

/// Folds `e` to a number when it contains no symbols, or when a symbolic
/// product has a zero factor.
pub fn constant_value(e: &Expr) -> Option<f64> {
    match e {
        Expr::Const(v) => Some(*v),
        Expr::Add(l, r) => Some(constant_value(l)? + constant_value(r)?),
        Expr::Sub(l, r) => Some(constant_value(l)? - constant_value(r)?),
        Expr::Mul(l, r) => match (constant_value(l), constant_value(r)) {
            (Some(a), Some(b)) => Some(a * b),
            (Some(z), None) | (None, Some(z)) if z == 0.0 => Some(0.0),
            _ => None,
        },
        Expr::Div(l, r) => Some(constant_value(l)? / constant_value(r)?),
        Expr::Pow(b, p) => Some(constant_value(b)?.powf(constant_value(p)?)),
        _ => None,
    }
}

/// Replaces every occurrence of `var` in `e` with `value`.
pub fn substitute(e: &Expr, var: &str, value: &Expr) -> Result<Expr, SymbolicError> {
    let sub = |inner: &Expr| substitute(inner, var, value).map(Box::new);
    Ok(match e {
        Expr::Var(name) if name == var => value.clone(),
        Expr::Var(_) | Expr::Const(_) => e.clone(),
        Expr::Add(l, r) => Expr::Add(sub(l.as_ref())?, sub(r.as_ref())?),
        Expr::Sub(l, r) => Expr::Sub(sub(l.as_ref())?, sub(r.as_ref())?),
        Expr::Mul(l, r) => Expr::Mul(sub(l.as_ref())?, sub(r.as_ref())?),
        Expr::Div(l, r) => Expr::Div(sub(l.as_ref())?, sub(r.as_ref())?),
        Expr::Pow(b, p) => Expr::Pow(sub(b.as_ref())?, sub(p.as_ref())?),
        other => return Err(SymbolicError::Unsupported(format!("cannot substitute {} in {}", var, other))),
    })
}

/// Evaluates `e`, taking every free symbol from `bindings`.
pub fn evaluate(e: &Expr, bindings: &Bindings) -> Result<f64, SymbolicError> {
    if let Some(v) = constant_value(e) {
        return Ok(v);
    }
    let mut names = Vec::new();
    let mut values = Vec::new();
    for name in e.extract_variables().1 {
        let name = name.to_string();
        let v = *bindings.get(&name).ok_or_else(|| SymbolicError::Unbound(name.clone()))?;
        names.push(name);
        values.push(v);
    }
    Ok(e.eval_expression(names.iter().map(String::as_str).collect(), &values))
}

fn antiderivative(e: &Expr, var: &str) -> Result<Expr, SymbolicError> {
    e.integrate(var).map_err(|err| SymbolicError::Unsupported(format!("{:?}", err)))
}

#[derive(Debug, Clone)]
pub enum Cond {
    Always,
    Greater(Expr, Expr),
    Less(Expr, Expr),
}

impl Cond {
    pub fn eval(&self, bindings: &Bindings) -> Result<bool, SymbolicError> {
        Ok(match self {
            Cond::Always => true,
            Cond::Greater(l, r) => evaluate(l, bindings)? > evaluate(r, bindings)?,
            Cond::Less(l, r) => evaluate(l, bindings)? < evaluate(r, bindings)?,
        })
    }
    pub fn set_variable(&self, var: &str, value: f64) -> Cond {
        match self {
            Cond::Always => Cond::Always,
            Cond::Greater(l, r) => Cond::Greater(l.clone().set_variable(var, value),
                                                 r.clone().set_variable(var, value)),
            Cond::Less(l, r) => Cond::Less(l.clone().set_variable(var, value),
                                           r.clone().set_variable(var, value)),
        }
    }
    /// Truth value when the condition no longer depends on any symbol.
    pub fn as_constant(&self) -> Option<bool> {
        match self {
            Cond::Always => Some(true),
            Cond::Greater(l, r) => Some(constant_value(l)? > constant_value(r)?),
            Cond::Less(l, r) => Some(constant_value(l)? < constant_value(r)?),
        }
    }
    /// The value of `var` where the condition flips. Only conditions linear in
    /// `var` with a numeric, nonzero slope have one.
    pub fn boundary(&self, var: &str) -> Result<Expr, SymbolicError> {
        let f = match self {
            Cond::Always => return Err(SymbolicError::Unsupported("the fallback branch has no boundary".to_string())),
            Cond::Greater(l, r) | Cond::Less(l, r) => l.clone() - r.clone(),
        };
        let slope = match constant_value(&f.diff(var)) {
            Some(k) if k != 0.0 => k,
            _ => return Err(SymbolicError::Unsupported(
                format!("condition {} is not linear in {} with a numeric slope", self, var))),
        };
        let rest = substitute(&f, var, &Expr::Const(0.0))?;
        Ok(rest * Expr::Const(-1.0 / slope))
    }
    pub fn ccode(&self) -> String {
        match self {
            Cond::Always => "1".to_string(),
            Cond::Greater(l, r) => format!("{} > {}", ccode(l), ccode(r)),
            Cond::Less(l, r) => format!("{} < {}", ccode(l), ccode(r)),
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cond::Always => write!(f, "otherwise"),
            Cond::Greater(l, r) => write!(f, "{} > {}", l, r),
            Cond::Less(l, r) => write!(f, "{} < {}", l, r),
        }
    }
}

/// Branches tried in order; the first satisfied condition wins.
#[derive(Debug, Clone)]
pub struct Piecewise {
    pieces: Vec<(Expr, Cond)>,
}

impl Piecewise {
    pub fn new(pieces: Vec<(Expr, Cond)>) -> Piecewise {
        Piecewise{pieces}
    }

    pub fn pieces(&self) -> &[(Expr, Cond)] {
        &self.pieces
    }

    pub fn eval(&self, bindings: &Bindings) -> Result<f64, SymbolicError> {
        for (body, cond) in &self.pieces {
            if cond.eval(bindings)? {
                return evaluate(body, bindings);
            }
        }
        Err(SymbolicError::NoBranch)
    }

    /// Fixes `var` to a number, dropping branches that become unreachable.
    pub fn set_variable(&self, var: &str, value: f64) -> Piecewise {
        let mut pieces = Vec::with_capacity(self.pieces.len());
        for (body, cond) in &self.pieces {
            let body = body.clone().set_variable(var, value);
            let cond = cond.set_variable(var, value);
            match cond.as_constant() {
                Some(false) => continue,
                Some(true) => {
                    pieces.push((body, Cond::Always));
                    break
                }
                None => pieces.push((body, cond)),
            }
        }
        Piecewise{pieces}
    }

    /// Antiderivative with respect to `var`.
    ///
    /// The fallback branch is integrated with a zero constant and every other
    /// branch is shifted to meet it at the boundary of its condition, so the
    /// result is continuous wherever a conditional branch borders the fallback.
    pub fn integrate(&self, var: &str) -> Result<Piecewise, SymbolicError> {
        let fallback = self.pieces
            .iter()
            .find(|(_, cond)| matches!(cond, Cond::Always))
            .ok_or_else(|| SymbolicError::Unsupported("piecewise expression has no fallback branch".to_string()))?;
        let base = antiderivative(&fallback.0, var)?;
        let mut pieces = Vec::with_capacity(self.pieces.len());
        for (body, cond) in &self.pieces {
            let anti = antiderivative(body, var)?;
            if let Cond::Always = cond {
                pieces.push((anti, Cond::Always));
                continue
            }
            let at = cond.boundary(var)?;
            let offset = substitute(&base, var, &at)? - substitute(&anti, var, &at)?;
            log::debug!("branch {} meets the fallback at {} = {}", cond, var, at);
            pieces.push((anti + offset, cond.clone()));
        }
        Ok(Piecewise{pieces})
    }

    /// C expression; branches become nested ternaries, NAN when nothing applies.
    pub fn ccode(&self) -> String {
        let mut acc = "NAN".to_string();
        for (body, cond) in self.pieces.iter().rev() {
            acc = match cond {
                Cond::Always => format!("({})", ccode(body)),
                _ => format!("(({}) ? ({}) : {})", cond.ccode(), ccode(body), acc),
            };
        }
        acc
    }
}

impl fmt::Display for Piecewise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let branches: Vec<String> = self.pieces.iter().map(|(body, cond)| match cond {
            Cond::Always => format!("{} otherwise", body),
            _ => format!("{} if {}", body, cond),
        }).collect();
        write!(f, "piecewise({})", branches.join("; "))
    }
}
