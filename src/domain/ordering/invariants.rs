use uuid::Uuid;

use super::Orderable;
use crate::domain::{DomainError, DomainResult};

/// Sort a sibling set by `(position, id)`.
///
/// Records without a position sort last. The id tie-break matches the
/// store's query order, so a stale read with a duplicated position still
/// yields one deterministic order.
pub fn sort_siblings<T: Orderable>(siblings: &mut [T]) {
    siblings.sort_by_key(|record| {
        let position = record.position();
        (position.is_none(), position, record.id())
    });
}

/// Index of the sibling with the given id.
pub fn locate_sibling<T: Orderable>(siblings: &[T], id: Uuid) -> Option<usize> {
    siblings.iter().position(|record| record.id() == Some(id))
}

/// Positions of a sorted sibling set must be exactly 0..n.
pub fn validate_dense_positions<T: Orderable>(siblings: &[T]) -> DomainResult<()> {
    for (index, record) in siblings.iter().enumerate() {
        let expected = index as u32;
        match record.position() {
            Some(position) if position == expected => {}
            Some(position) => {
                return Err(DomainError::InvariantViolation(format!(
                    "{} at index {} has position {} (expected {})",
                    T::KIND,
                    index,
                    position,
                    expected
                )));
            }
            None => {
                return Err(DomainError::InvariantViolation(format!(
                    "{} at index {} has no position",
                    T::KIND,
                    index
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Genre;

    fn genre(name: &str, position: Option<u32>, id: Uuid) -> Genre {
        let mut genre = Genre::new(name);
        genre.id = Some(id);
        genre.position = position;
        genre
    }

    #[test]
    fn test_sort_by_position() {
        let mut set = vec![
            genre("c", Some(2), Uuid::new_v4()),
            genre("a", Some(0), Uuid::new_v4()),
            genre("b", Some(1), Uuid::new_v4()),
        ];
        sort_siblings(&mut set);
        let names: Vec<_> = set.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_tie_breaks_by_id() {
        let low = Uuid::from_u128(1);
        let high = Uuid::from_u128(2);
        let mut set = vec![genre("high", Some(0), high), genre("low", Some(0), low)];
        sort_siblings(&mut set);
        assert_eq!(set[0].id, Some(low));
        assert_eq!(set[1].id, Some(high));
    }

    #[test]
    fn test_unpositioned_sort_last() {
        let mut set = vec![
            genre("loose", None, Uuid::new_v4()),
            genre("first", Some(0), Uuid::new_v4()),
        ];
        sort_siblings(&mut set);
        assert_eq!(set[0].name, "first");
        assert_eq!(set[1].name, "loose");
    }

    #[test]
    fn test_dense_positions() {
        let set = vec![
            genre("a", Some(0), Uuid::new_v4()),
            genre("b", Some(1), Uuid::new_v4()),
        ];
        assert!(validate_dense_positions(&set).is_ok());
        assert!(validate_dense_positions::<Genre>(&[]).is_ok());
    }

    #[test]
    fn test_gap_is_rejected() {
        let set = vec![
            genre("a", Some(0), Uuid::new_v4()),
            genre("b", Some(2), Uuid::new_v4()),
        ];
        assert!(validate_dense_positions(&set).is_err());
    }

    #[test]
    fn test_duplicate_position_is_rejected() {
        let set = vec![
            genre("a", Some(0), Uuid::new_v4()),
            genre("b", Some(0), Uuid::new_v4()),
        ];
        assert!(validate_dense_positions(&set).is_err());
    }

    #[test]
    fn test_locate_sibling() {
        let id = Uuid::new_v4();
        let set = vec![genre("a", Some(0), Uuid::new_v4()), genre("b", Some(1), id)];
        assert_eq!(locate_sibling(&set, id), Some(1));
        assert_eq!(locate_sibling(&set, Uuid::new_v4()), None);
    }
}
