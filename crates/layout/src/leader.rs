//! Dot leaders joining a row's left and right text.

/// Number of dots filling `available` points, or `None` when the texts
/// already overlap.
pub fn dot_count(available: f32, dot_width: f32) -> Option<usize> {
    if dot_width <= 0.0 {
        return Some(0);
    }
    let count = (available / dot_width).floor();
    if count < 0.0 {
        None
    } else {
        Some(count as usize)
    }
}

/// A leader of `count` characters. The first and last dots become spaces
/// to separate the leader from non-empty neighbouring text.
pub fn dot_leader(count: usize, pad_start: bool, pad_end: bool) -> String {
    let mut chars = vec!['.'; count];
    if let Some(first) = chars.first_mut() {
        if pad_start {
            *first = ' ';
        }
    }
    if let Some(last) = chars.last_mut() {
        if pad_end {
            *last = ' ';
        }
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_count_floors() {
        assert_eq!(dot_count(10.0, 2.224), Some(4));
        assert_eq!(dot_count(2.0, 2.224), Some(0));
        assert_eq!(dot_count(-0.5, 2.224), None);
    }

    #[test]
    fn test_leader_keeps_its_length() {
        assert_eq!(dot_leader(5, true, true), " ... ");
        assert_eq!(dot_leader(5, false, true), ".... ");
        assert_eq!(dot_leader(5, true, false), " ....");
        assert_eq!(dot_leader(1, true, true), " ");
        assert_eq!(dot_leader(0, true, true), "");
    }
}
