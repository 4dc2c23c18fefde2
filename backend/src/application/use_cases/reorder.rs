use crate::application::repositories::PageRepository;
use crate::domain::{DomainError, DomainResult, Identity, PageOrder};

/// Use case for persisting a full display order from the drag-reorder UI.
///
/// Each id's index in the submitted array becomes its position, written in
/// one atomic batch so a failure cannot leave the ordering half-updated.
/// This is the one registry operation behind the admin gate.
pub struct ReorderPages<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> ReorderPages<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, identity: Option<&Identity>, order: &PageOrder) -> DomainResult<()> {
        match identity {
            Some(identity) if identity.is_admin() => {}
            Some(_) => {
                return Err(DomainError::Forbidden(
                    "Admin role required to reorder pages".to_string(),
                ))
            }
            None => {
                return Err(DomainError::Forbidden(
                    "Authentication required to reorder pages".to_string(),
                ))
            }
        }
        self.repository.set_positions(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryPageRepository;
    use crate::application::use_cases::{CreatePage, ListPages};
    use crate::domain::Role;

    fn admin() -> Identity {
        Identity::new("u-1", Role::Admin)
    }

    fn seed(repo: &mut InMemoryPageRepository, ids: &[&str]) {
        for id in ids {
            CreatePage::new(repo).execute(id, None, None, None).unwrap();
        }
    }

    #[test]
    fn test_reorder_reflects_input_order() {
        let mut repo = InMemoryPageRepository::new();
        seed(&mut repo, &["a", "b", "c"]);

        let order = PageOrder::new(vec!["c".into(), "a".into(), "b".into()]).unwrap();
        ReorderPages::new(&mut repo)
            .execute(Some(&admin()), &order)
            .unwrap();

        let listed: Vec<String> = ListPages::new(&repo)
            .execute(false)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(listed, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_requires_session() {
        let mut repo = InMemoryPageRepository::new();
        seed(&mut repo, &["a"]);

        let order = PageOrder::new(vec!["a".into()]).unwrap();
        let err = ReorderPages::new(&mut repo).execute(None, &order).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[test]
    fn test_reorder_requires_admin_role() {
        let mut repo = InMemoryPageRepository::new();
        seed(&mut repo, &["a"]);

        let editor = Identity::new("u-2", Role::Editor);
        let order = PageOrder::new(vec!["a".into()]).unwrap();
        let err = ReorderPages::new(&mut repo)
            .execute(Some(&editor), &order)
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[test]
    fn test_reorder_skips_unknown_ids() {
        let mut repo = InMemoryPageRepository::new();
        seed(&mut repo, &["a", "b"]);

        let order = PageOrder::new(vec!["b".into(), "ghost".into(), "a".into()]).unwrap();
        ReorderPages::new(&mut repo)
            .execute(Some(&admin()), &order)
            .unwrap();

        let listed: Vec<String> = ListPages::new(&repo)
            .execute(false)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(listed, vec!["b", "a"]);
    }
}
