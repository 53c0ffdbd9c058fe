use crate::models::{NearestPairResult, Point2D};

/// Divide-and-conquer closest pair of points.
///
/// Points are sorted by x once, then split by index midpoint. Slices of three or fewer
/// points are solved by brute force. Fewer than two points yields
/// [`NearestPairResult::none`].
pub fn closest_pair(points: &[Point2D]) -> NearestPairResult {
    if points.len() < 2 {
        return NearestPairResult::none();
    }

    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| a.x.total_cmp(&b.x));

    closest_pair_recursive(&by_x)
}

fn closest_pair_recursive(points: &[Point2D]) -> NearestPairResult {
    if points.len() <= 3 {
        return brute_force(points);
    }

    let mid = points.len() / 2;
    let mid_x = points[mid].x;

    let left = closest_pair_recursive(&points[..mid]);
    let right = closest_pair_recursive(&points[mid..]);

    let best = if right.distance < left.distance { right } else { left };

    let strip: Vec<Point2D> = points
        .iter()
        .filter(|p| (p.x - mid_x).abs() < best.distance)
        .copied()
        .collect();

    let across = closest_in_strip(strip, best.distance);
    if across.distance < best.distance {
        across
    } else {
        best
    }
}

/// All-pairs comparison, used for the base case
pub fn brute_force(points: &[Point2D]) -> NearestPairResult {
    let mut best = NearestPairResult::none();

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let distance = a.distance(b);
            if distance < best.distance {
                best = NearestPairResult::new(*a, *b, distance);
            }
        }
    }

    best
}

/// Scan the band around the dividing line for a pair closer than `limit`.
///
/// The strip is ordered by y; each point is compared with the following points only
/// while their y-difference stays below the best distance found so far.
fn closest_in_strip(mut strip: Vec<Point2D>, limit: f64) -> NearestPairResult {
    strip.sort_by(|a, b| a.y.total_cmp(&b.y));

    let mut best = NearestPairResult {
        pair: None,
        distance: limit,
    };

    for (i, a) in strip.iter().enumerate() {
        for b in &strip[i + 1..] {
            if b.y - a.y >= best.distance {
                break;
            }
            let distance = a.distance(b);
            if distance < best.distance {
                best = NearestPairResult::new(*a, *b, distance);
            }
        }
    }

    best
}
