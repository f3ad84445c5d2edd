// this file turns SVG `transform` attributes into 3x3 affine matrices
use std::fmt;
use regex::Regex;
use super::error::TransformError;

pub type F64Point = (f64, f64);

/// A 2D affine map in homogeneous coordinates, row-major.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Transform {
    pub m: [[f64; 3]; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        m: [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
    };
    pub fn translate(tx: f64, ty: f64) -> Transform {
        Transform{m: [[1., 0., tx], [0., 1., ty], [0., 0., 1.]]}
    }
    pub fn scale(sx: f64, sy: f64) -> Transform {
        Transform{m: [[sx, 0., 0.], [0., sy, 0.], [0., 0., 1.]]}
    }
    /// Counter-clockwise in a y-up frame, clockwise on screen, as SVG does it.
    pub fn rotate(degrees: f64) -> Transform {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Transform{m: [[cos, -sin, 0.], [sin, cos, 0.], [0., 0., 1.]]}
    }
    pub fn rotate_about(degrees: f64, cx: f64, cy: f64) -> Transform {
        let to_pivot = compose(&Transform::translate(cx, cy), &Transform::rotate(degrees));
        compose(&to_pivot, &Transform::translate(-cx, -cy))
    }
    /// `matrix(a,b,c,d,e,f)` in SVG column order.
    pub fn matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Transform {
        Transform{m: [[a, c, e], [b, d, f], [0., 0., 1.]]}
    }
    pub fn is_identity(&self) -> bool {
        *self == Transform::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.m;
        write!(f, "matrix({}, {}, {}, {}, {}, {})",
               m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2])
    }
}

/// `t * u`: the result applies `u` first, then `t`.
pub fn compose(t: &Transform, u: &Transform) -> Transform {
    let mut m = [[0.0f64; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| t.m[i][k] * u.m[k][j]).sum();
        }
    }
    Transform{m}
}

pub fn ftransform(t: &Transform, p: F64Point) -> F64Point {
    let m = &t.m;
    (m[0][0] * p.0 + m[0][1] * p.1 + m[0][2],
     m[1][0] * p.0 + m[1][1] * p.1 + m[1][2])
}

const PRIMITIVE_REGEX_STR: &str = r"(\w+)\s*\(([^)]*)\)";
const NUMBER_REGEX_STR: &str = r"[-+]?(?:\d*\.\d+|\d+\.?)(?:[eE][-+]?\d+)?";

lazy_static! {
    static ref PRIMITIVE_REGEX: Regex = Regex::new(PRIMITIVE_REGEX_STR).unwrap();
    static ref NUMBER_REGEX: Regex = Regex::new(NUMBER_REGEX_STR).unwrap();
}

fn parse_numbers(args: &str) -> Result<Vec<f64>, TransformError> {
    NUMBER_REGEX
        .find_iter(args)
        .map(|num| {
            num.as_str()
                .parse::<f64>()
                .map_err(|_| TransformError::Number(num.as_str().to_string()))
        })
        .collect()
}

fn check_arity(primitive: &str, values: &[f64], allowed: impl Fn(usize) -> bool, expected: &'static str)
               -> Result<(), TransformError> {
    if allowed(values.len()) {
        Ok(())
    } else {
        Err(TransformError::Arity {
            primitive: primitive.to_string(),
            expected,
            got: values.len(),
        })
    }
}

/// Parses a whole attribute value; primitives accumulate left to right.
///
/// `translate` and `scale` read their first one or two arguments and ignore
/// the rest. A `matrix` without exactly six arguments yields
/// `TransformError::Matrix`, which callers may treat as skippable.
pub fn parse_transform(input: &str) -> Result<Transform, TransformError> {
    let mut ret = Transform::IDENTITY;
    for caps in PRIMITIVE_REGEX.captures_iter(input) {
        let primitive = &caps[1];
        let values = parse_numbers(&caps[2])?;
        let m = match primitive {
            "translate" => {
                check_arity(primitive, &values, |n| n >= 1, "at least 1")?;
                Transform::translate(values[0], values.get(1).copied().unwrap_or(0.0))
            }
            "scale" => {
                check_arity(primitive, &values, |n| n >= 1, "at least 1")?;
                Transform::scale(values[0], values.get(1).copied().unwrap_or(values[0]))
            }
            "rotate" => {
                check_arity(primitive, &values, |n| n == 1 || n == 3, "1 or 3")?;
                if values.len() == 3 {
                    Transform::rotate_about(values[0], values[1], values[2])
                } else {
                    Transform::rotate(values[0])
                }
            }
            "matrix" => {
                if values.len() != 6 {
                    return Err(TransformError::Matrix(values.len()));
                }
                Transform::matrix(values[0], values[1], values[2], values[3], values[4], values[5])
            }
            _ => {
                log::debug!("ignoring unsupported transform primitive {}()", primitive);
                continue
            }
        };
        ret = compose(&ret, &m);
    }
    Ok(ret)
}
