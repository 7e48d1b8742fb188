pub mod errors;
pub mod db;
pub mod employee;

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};

    use crate::{db, employee};

    #[tokio::test]
    async fn employee_entity_round_trips_through_sqlite() -> anyhow::Result<()> {
        let db = db::connect_with_config(&configs::DatabaseConfig::in_memory()).await?;
        migration::Migrator::up(&db, None).await?;

        let now = Utc::now().into();
        let am = employee::ActiveModel {
            name: Set("Ann".into()),
            email: Set("ann@x.com".into()),
            phone: Set("1234567890".into()),
            role: Set(Some("Engineer".into())),
            department: Set(None),
            salary: Set(Some(1500.5)),
            date_of_joining: Set(NaiveDate::from_ymd_opt(2024, 3, 1)),
            status: Set(employee::EmployeeStatus::Inactive),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let created = am.insert(&db).await?;
        assert_eq!(created.id, 1);

        let found = employee::Entity::find_by_id(created.id).one(&db).await?.expect("row");
        assert_eq!(found.status, employee::EmployeeStatus::Inactive);
        assert_eq!(found.salary, Some(1500.5));
        assert_eq!(found.date_of_joining, NaiveDate::from_ymd_opt(2024, 3, 1));

        // unique index on email
        let dup = employee::ActiveModel {
            name: Set("Other".into()),
            email: Set("ann@x.com".into()),
            phone: Set("0".into()),
            status: Set(employee::EmployeeStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        assert!(dup.insert(&db).await.is_err());
        Ok(())
    }
}
