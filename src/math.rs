use num::Float;

/// Similar to numpy.interp, evaluated at a single point.
///
/// `coords` must be sorted by x. Points left of the first coordinate take its y,
/// points right of the last take the last y. Returns `None` for empty `coords`
/// or a NaN `x`.
pub(crate) fn interp<F: Float>(x: F, coords: &[(F, F)]) -> Option<F> {
    let &(x_first, y_first) = coords.first()?;
    let &(x_last, y_last) = coords.last()?;

    // Base cases
    if x <= x_first {
        return Some(y_first);
    }
    if x >= x_last {
        return Some(y_last);
    }

    coords.windows(2).find_map(|pair| {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];

        if !(x1 <= x && x <= x2) {
            return None;
        }
        if x2 == x1 {
            return Some(y2);
        }

        // Actual interpolation
        Some(y1 + (x - x1) * (y2 - y1) / (x2 - x1))
    })
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];

    assert_eq!(
        x.iter().map(|x| interp(*x, &coords).unwrap()).collect::<Vec<f64>>(),
        vec![3., 3., 2.5, 0.5599999999999996, 0.]
    );

    let x = [2.5, -1., 7.5];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];

    assert_eq!(
        x.iter().map(|x| interp(*x, &coords).unwrap()).collect::<Vec<f64>>(),
        vec![4., 0., 2.]
    );
}

#[test]
fn test_interp_degenerate() {
    assert_eq!(interp(1.0f64, &[]), None);
    assert_eq!(interp(f64::NAN, &[(0., 0.), (1., 1.)]), None);
    assert_eq!(interp(1.0f32, &[(0., 0.), (1., 1.), (1., 0.5), (2., 0.)]), Some(1.));
}
