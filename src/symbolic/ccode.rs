// C rendering of symbolic expressions
use RustedSciThe::symbolic::symbolic_engine::Expr;

fn is_negation(e: &Expr) -> bool {
    match e {
        Expr::Mul(l, _) => matches!(**l, Expr::Const(v) if v == -1.0),
        _ => false,
    }
}

// 1: sums and anything with a leading minus, 2: products, 3: atoms and calls
fn precedence(e: &Expr) -> u8 {
    match e {
        Expr::Const(v) if *v < 0.0 => 1,
        Expr::Add(..) | Expr::Sub(..) => 1,
        Expr::Mul(..) if is_negation(e) => 1,
        Expr::Mul(..) | Expr::Div(..) => 2,
        _ => 3,
    }
}

fn wrap(e: &Expr, min: u8) -> String {
    if precedence(e) < min {
        format!("({})", ccode(e))
    } else {
        ccode(e)
    }
}

/// C source for `e`. Constants print as double literals so no integer
/// division can sneak in; powers go through `pow()`.
pub fn ccode(e: &Expr) -> String {
    match e {
        Expr::Var(name) => name.clone(),
        Expr::Const(v) => format!("{:?}", v),
        Expr::Add(l, r) => format!("{} + {}", wrap(l, 1), wrap(r, 2)),
        Expr::Sub(l, r) => format!("{} - {}", wrap(l, 1), wrap(r, 2)),
        Expr::Mul(_, r) if is_negation(e) => format!("-{}", wrap(r, 2)),
        Expr::Mul(l, r) => format!("{}*{}", wrap(l, 2), wrap(r, 2)),
        Expr::Div(l, r) => format!("{}/{}", wrap(l, 2), wrap(r, 3)),
        Expr::Pow(b, p) => format!("pow({}, {})", ccode(b), ccode(p)),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::ccode;
    use RustedSciThe::symbolic::symbolic_engine::Expr;

    fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    #[test]
    fn test_atoms() {
        assert_eq!(ccode(&var("x")), "x");
        assert_eq!(ccode(&Expr::Const(2.0)), "2.0");
        assert_eq!(ccode(&Expr::Const(-0.75)), "-0.75");
    }

    #[test]
    fn test_tiny_coefficient_kept() {
        assert_eq!(ccode(&(Expr::Const(1e-10) * var("x"))), "1e-10*x");
        assert_eq!(ccode(&(var("x") + Expr::Const(3e-12))), "x + 3e-12");
    }

    #[test]
    fn test_grouping() {
        let x = var("x");
        let sum = x.clone() + Expr::Const(1.0);
        assert_eq!(ccode(&(sum.clone() * var("t"))), "(x + 1.0)*t");
        assert_eq!(ccode(&(var("t") - sum.clone())), "t - (x + 1.0)");
        assert_eq!(ccode(&(x.clone() / (var("t") * Expr::Const(2.0)))), "x/(t*2.0)");
        assert_eq!(ccode(&(var("m") * Expr::Const(-2.0))), "m*(-2.0)");
        assert_eq!(ccode(&x.clone().pow(Expr::Const(2.0))), "pow(x, 2.0)");
    }

    #[test]
    fn test_negation() {
        let x = var("x");
        let neg_x = Expr::Const(-1.0) * x.clone();
        assert_eq!(ccode(&neg_x), "-x");
        assert_eq!(ccode(&(var("m") * neg_x.clone())), "m*(-x)");
        assert_eq!(ccode(&(Expr::Const(-1.0) * (x + var("t")))), "-(x + t)");
    }
}
