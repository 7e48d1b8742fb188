use std::sync::Arc;

use models::employee::{self, EmployeeStatus};
use tracing::{info, instrument};

use crate::employee::domain::{EmployeeChanges, EmployeeQuery, NewEmployee};
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Application service encapsulating employee business rules for the
/// relational store: field validation, status defaulting and email uniqueness.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Paginated, filtered listing. Pagination inputs are clamped, never rejected.
    pub async fn list(&self, query: &EmployeeQuery) -> Result<(Vec<employee::Model>, u64), ServiceError> {
        self.repo.list(query).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> { self.repo.get(id).await }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: NewEmployee) -> Result<employee::Model, ServiceError> {
        employee::validate_name(&input.name)?;
        employee::validate_email(&input.email)?;
        employee::validate_phone(&input.phone)?;
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ServiceError::duplicate_email());
        }
        let status = input.status.unwrap_or(EmployeeStatus::Active);
        let created = self.repo.insert(input, status).await?;
        info!(id = created.id, "employee_created");
        Ok(created)
    }

    /// Partial update; re-checks email uniqueness only when the email changes.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: EmployeeChanges) -> Result<employee::Model, ServiceError> {
        let current = self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Employee"))?;

        if let Some(name) = &changes.name {
            employee::validate_name(name)?;
        }
        if let Some(phone) = &changes.phone {
            employee::validate_phone(phone)?;
        }
        if let Some(email) = &changes.email {
            employee::validate_email(email)?;
            if *email != current.email && self.repo.find_by_email(email).await?.is_some() {
                return Err(ServiceError::duplicate_email());
            }
        }

        let updated = self.repo.update(current, changes).await?;
        info!(id = updated.id, "employee_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Employee"));
        }
        info!(id, "employee_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use super::*;
    use crate::employee::repository::SeaOrmEmployeeRepository;
    use crate::pagination::{total_pages, Pagination};
    use crate::test_support::get_db;

    async fn service() -> anyhow::Result<EmployeeService<SeaOrmEmployeeRepository>> {
        let db = get_db().await?;
        Ok(EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(db))))
    }

    fn new_employee(name: &str, email: &str) -> NewEmployee {
        NewEmployee {
            name: name.into(),
            email: email.into(),
            phone: "1234567890".into(),
            role: None,
            department: None,
            salary: None,
            date_of_joining: None,
            status: None,
        }
    }

    fn page(page: i64, page_size: i64) -> EmployeeQuery {
        EmployeeQuery { pagination: Pagination { page, page_size }, ..Default::default() }
    }

    /// Seeds ten employees across two departments, alternating status.
    async fn seed(svc: &EmployeeService<SeaOrmEmployeeRepository>) -> anyhow::Result<()> {
        for i in 1..=10 {
            let mut e = new_employee(&format!("Person {i}"), &format!("person{i}@corp.com"));
            e.department = Some(if i % 2 == 0 { "Engineering".into() } else { "Sales".into() });
            e.status = Some(if i % 3 == 0 { EmployeeStatus::Inactive } else { EmployeeStatus::Active });
            svc.create(e).await?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_defaults() -> anyhow::Result<()> {
        let svc = service().await?;
        let ann = svc.create(new_employee("Ann", "ann@x.com")).await?;
        assert_eq!(ann.id, 1);
        assert_eq!(ann.status, EmployeeStatus::Active);
        assert_eq!(ann.created_at, ann.updated_at);

        let bob = svc.create(new_employee("Bob", "bob@x.com")).await?;
        assert_eq!(bob.id, 2);

        let fetched = svc.get(ann.id).await?.expect("exists");
        assert_eq!(fetched, ann);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() -> anyhow::Result<()> {
        let svc = service().await?;
        svc.create(new_employee("Ann", "ann@x.com")).await?;
        let err = svc.create(new_employee("Another Ann", "ann@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Email already exists"));
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields() -> anyhow::Result<()> {
        let svc = service().await?;
        let err = svc.create(new_employee("", "ann@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        let err = svc.create(new_employee("Ann", "not-an-email")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(svc.list(&page(1, 10)).await?.0.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn pages_reconstruct_filtered_collection() -> anyhow::Result<()> {
        let svc = service().await?;
        seed(&svc).await?;

        let (all, total_all) = svc.list(&page(1, 100)).await?;
        assert_eq!(total_all, 10);
        let expected: Vec<i32> = all.iter().map(|e| e.id).collect();

        for size in 1..=11 {
            let (_, total) = svc.list(&page(1, size)).await?;
            assert_eq!(total, total_all);
            let pages = total_pages(total, size);
            let mut seen = Vec::new();
            for p in 1..=pages as i64 {
                let (items, t) = svc.list(&page(p, size)).await?;
                assert_eq!(t, total_all);
                assert!(items.len() as i64 <= size);
                seen.extend(items.iter().map(|e| e.id));
            }
            assert_eq!(seen, expected, "page_size {size}");
            let unique: HashSet<_> = seen.iter().collect();
            assert_eq!(unique.len(), seen.len());
        }
        Ok(())
    }

    #[tokio::test]
    async fn invalid_pagination_is_clamped() -> anyhow::Result<()> {
        let svc = service().await?;
        seed(&svc).await?;
        let (items, total) = svc.list(&page(0, 0)).await?;
        assert_eq!(total, 10);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].id, 1);

        let (items, _) = svc.list(&page(-4, 3)).await?;
        assert_eq!(items.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let (items, total) = svc.list(&page(50, 3)).await?;
        assert!(items.is_empty());
        assert_eq!(total, 10);
        Ok(())
    }

    #[tokio::test]
    async fn pages_far_past_the_end_are_empty() -> anyhow::Result<()> {
        let svc = service().await?;
        seed(&svc).await?;
        for query in [page(i64::MAX, 10), page(1 << 62, 4), page(i64::MAX, i64::MAX)] {
            let (items, total) = svc.list(&query).await?;
            assert!(items.is_empty());
            assert_eq!(total, 10);
        }
        Ok(())
    }

    #[tokio::test]
    async fn filters_intersect() -> anyhow::Result<()> {
        let svc = service().await?;
        seed(&svc).await?;

        let (active, total) = svc
            .list(&EmployeeQuery { status: Some("Active".into()), pagination: Pagination { page: 1, page_size: 100 }, ..Default::default() })
            .await?;
        assert_eq!(total, 7);
        assert!(active.iter().all(|e| e.status == EmployeeStatus::Active));

        let q = EmployeeQuery {
            pagination: Pagination { page: 1, page_size: 100 },
            search: Some("PERSON".into()),
            department: Some("Engineering".into()),
            status: Some("Inactive".into()),
        };
        let (items, total) = svc.list(&q).await?;
        // Engineering = even ids, Inactive = multiples of 3
        assert_eq!(items.iter().map(|e| e.id).collect::<Vec<_>>(), vec![6]);
        assert_eq!(total, 1);

        let (none, total) = svc
            .list(&EmployeeQuery { status: Some("Retired".into()), ..Default::default() })
            .await?;
        assert!(none.is_empty());
        assert_eq!(total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_name_or_email_case_insensitively() -> anyhow::Result<()> {
        let svc = service().await?;
        svc.create(new_employee("Ann Lee", "ann@x.com")).await?;
        svc.create(new_employee("Bob", "bob@ANNEX.org")).await?;
        svc.create(new_employee("Carl", "carl@x.com")).await?;
        svc.create(new_employee("Dora 100%", "dora@x.com")).await?;

        let q = |s: &str| EmployeeQuery { search: Some(s.into()), ..Default::default() };
        let (items, total) = svc.list(&q("aNn")).await?;
        assert_eq!(total, 2);
        assert_eq!(items.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(), vec!["Ann Lee", "Bob"]);

        // wildcards are literal
        let (items, _) = svc.list(&q("%")).await?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Dora 100%");

        let (items, total) = svc.list(&q("")).await?;
        assert_eq!((items.len(), total), (4, 4));
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_non_ascii_names() -> anyhow::Result<()> {
        let svc = service().await?;
        svc.create(new_employee("Élodie Durand", "elodie@x.com")).await?;
        svc.create(new_employee("Carl", "carl@x.com")).await?;

        for term in ["Élodie", "ÉLODIE", "lodie", "DURAND"] {
            let (items, total) = svc.list(&EmployeeQuery { search: Some(term.into()), ..Default::default() }).await?;
            assert_eq!(total, 1, "search {term:?}");
            assert_eq!(items[0].name, "Élodie Durand");
        }
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_touches_only_supplied_fields() -> anyhow::Result<()> {
        let svc = service().await?;
        let mut input = new_employee("Ann", "ann@x.com");
        input.role = Some("Engineer".into());
        input.salary = Some(1000.0);
        let before = svc.create(input).await?;

        tokio::time::sleep(Duration::from_millis(5)).await;
        let changes = EmployeeChanges { department: Some(Some("X".into())), ..Default::default() };
        let after = svc.update(before.id, changes).await?;

        assert_eq!(after.department.as_deref(), Some("X"));
        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.role, before.role);
        assert_eq!(after.salary, before.salary);
        assert_eq!(after.status, before.status);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn explicit_null_clears_nullable_field() -> anyhow::Result<()> {
        let svc = service().await?;
        let mut input = new_employee("Ann", "ann@x.com");
        input.role = Some("Engineer".into());
        let created = svc.create(input).await?;

        let changes: EmployeeChanges = serde_json::from_str(r#"{"role": null}"#)?;
        let updated = svc.update(created.id, changes).await?;
        assert_eq!(updated.role, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_email_checks_uniqueness_against_others() -> anyhow::Result<()> {
        let svc = service().await?;
        let ann = svc.create(new_employee("Ann", "ann@x.com")).await?;
        svc.create(new_employee("Bob", "bob@x.com")).await?;

        // unchanged email is not a conflict with itself
        let same = EmployeeChanges { email: Some("ann@x.com".into()), ..Default::default() };
        assert!(svc.update(ann.id, same).await.is_ok());

        let taken = EmployeeChanges { email: Some("bob@x.com".into()), ..Default::default() };
        let err = svc.update(ann.id, taken).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let fresh = EmployeeChanges { email: Some("ann.lee@x.com".into()), ..Default::default() };
        assert_eq!(svc.update(ann.id, fresh).await?.email, "ann.lee@x.com");
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() -> anyhow::Result<()> {
        let svc = service().await?;
        let err = svc.update(42, EmployeeChanges::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Employee not found"));
        let err = svc.delete(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() -> anyhow::Result<()> {
        let svc = service().await?;
        svc.create(new_employee("Ann", "ann@x.com")).await?;
        let bob = svc.create(new_employee("Bob", "bob@x.com")).await?;
        svc.delete(bob.id).await?;
        assert!(svc.get(bob.id).await?.is_none());

        let carl = svc.create(new_employee("Carl", "carl@x.com")).await?;
        assert_eq!(carl.id, 3);
        Ok(())
    }
}
