use uuid::Uuid;

/// Generate a request correlation id in the 8-4-4-4-12 hex form.
pub fn make_guid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_guid_shaped(value: &str) -> bool {
        let groups: Vec<&str> = value.split('-').collect();
        let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        lengths == [8, 4, 4, 4, 12]
            && groups
                .iter()
                .all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
    }

    #[test]
    fn test_make_guid_shape() {
        for _ in 0..100 {
            let guid = make_guid();
            assert_eq!(guid.len(), 36);
            assert!(is_guid_shaped(&guid), "unexpected guid {}", guid);
        }
    }

    #[test]
    fn test_make_guid_distinct() {
        let guids: HashSet<String> = (0..1000).map(|_| make_guid()).collect();
        assert_eq!(guids.len(), 1000);
    }
}
