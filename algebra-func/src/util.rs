//! Small helpers shared by the wrapped-function kinds.

use algebra::{Error, Scalar};

/// Renders a per-input argument list: a single entry stands bare, several are parenthesized.
pub(crate) fn squeeze(items: &[String]) -> String {
    if items.len() == 1 {
        items[0].clone()
    } else {
        format!("({})", items.join(", "))
    }
}

/// Combines two per-input argument lists elementwise, repeating a length-one list to match the
/// other's length.
pub(crate) fn broadcast(
    op: impl Fn(Scalar, Scalar) -> Scalar,
    xs: &[Scalar],
    ys: &[Scalar],
) -> Result<Vec<Scalar>, Error> {
    let (xs, ys) = match (xs.len(), ys.len()) {
        (1, n) if n > 1 => (vec![xs[0].clone(); n], ys.to_vec()),
        (n, 1) if n > 1 => (xs.to_vec(), vec![ys[0].clone(); n]),
        _ => (xs.to_vec(), ys.to_vec()),
    };
    if xs.len() != ys.len() {
        return Err(Error::UnsupportedOperation(format!(
            "cannot broadcast {} per-input arguments against {}",
            xs.len(),
            ys.len()
        )));
    }
    Ok(xs.into_iter().zip(ys).map(|(x, y)| op(x, y)).collect())
}

/// Exact elementwise identity over two per-input argument lists.
pub(crate) fn identical_scalars(xs: &[Scalar], ys: &[Scalar]) -> bool {
    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.identical(y))
}
