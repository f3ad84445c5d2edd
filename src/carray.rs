// emits resolved circle centers as C++ array declarations
use std::io;
use super::transform::F64Point;

fn pack_values(values: impl Iterator<Item = f64>) -> String {
    values.map(|v| format!("{:.6}", v)).collect::<Vec<String>>().join(", ")
}

/// Three declarations, suffixed with `number` so several emissions can share one file.
pub fn c_arrays(coords: &[F64Point], number: i64) -> String {
    format!(
        "static constexpr float circle_xs_{n}[] = {{{xs}}};\n\
         static constexpr float circle_ys_{n}[] = {{{ys}}};\n\
         static constexpr int num_circles_{n} = {count};\n",
        n = number,
        xs = pack_values(coords.iter().map(|p| p.0)),
        ys = pack_values(coords.iter().map(|p| p.1)),
        count = coords.len(),
    )
}

pub fn write_c_arrays<W: io::Write>(out: &mut W, coords: &[F64Point], number: i64) -> io::Result<()> {
    out.write_all(c_arrays(coords, number).as_bytes())?;
    out.flush()
}
