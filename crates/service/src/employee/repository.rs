use async_trait::async_trait;
use chrono::Utc;
use models::employee::{self, EmployeeStatus};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::employee::domain::{EmployeeChanges, EmployeeQuery, NewEmployee};
use crate::errors::ServiceError;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// One page of matching rows ordered by id, plus the unpaginated match count.
    async fn list(&self, query: &EmployeeQuery) -> Result<(Vec<employee::Model>, u64), ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<employee::Model>, ServiceError>;
    async fn insert(&self, input: NewEmployee, status: EmployeeStatus) -> Result<employee::Model, ServiceError>;
    async fn update(&self, current: employee::Model, changes: EmployeeChanges) -> Result<employee::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// `LOWER(column) LIKE LOWER(pattern)`; the database folds both sides so
/// the term and the stored value go through the same case mapping.
fn contains_ci(column: employee::Column, pattern: &str) -> SimpleExpr {
    Expr::cust_with_exprs(
        format!("$1 LIKE LOWER($2) ESCAPE '{LIKE_ESCAPE}'"),
        [
            Func::lower(Expr::col((employee::Entity, column))).into(),
            Expr::val(pattern.to_owned()).into(),
        ],
    )
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list(&self, query: &EmployeeQuery) -> Result<(Vec<employee::Model>, u64), ServiceError> {
        let mut select = employee::Entity::find();

        if let Some(term) = query.search_term() {
            let pattern = format!("%{}%", escape_like(term));
            select = select.filter(
                Condition::any()
                    .add(contains_ci(employee::Column::Name, &pattern))
                    .add(contains_ci(employee::Column::Email, &pattern)),
            );
        }
        if let Some(department) = query.department_filter() {
            select = select.filter(employee::Column::Department.eq(department));
        }
        if let Some(status) = query.status_filter() {
            select = select.filter(employee::Column::Status.eq(status));
        }

        let total = select.clone().count(&self.db).await?;

        let (offset, limit) = query.pagination.offset_limit();
        let items = select
            .order_by_asc(employee::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok((items, total))
    }

    async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    async fn insert(&self, input: NewEmployee, status: EmployeeStatus) -> Result<employee::Model, ServiceError> {
        let now = Utc::now().into();
        let am = employee::ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            role: Set(input.role),
            department: Set(input.department),
            salary: Set(input.salary),
            date_of_joining: Set(input.date_of_joining),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, current: employee::Model, changes: EmployeeChanges) -> Result<employee::Model, ServiceError> {
        let mut am: employee::ActiveModel = current.into();
        if let Some(name) = changes.name { am.name = Set(name); }
        if let Some(email) = changes.email { am.email = Set(email); }
        if let Some(phone) = changes.phone { am.phone = Set(phone); }
        if let Some(role) = changes.role { am.role = Set(role); }
        if let Some(department) = changes.department { am.department = Set(department); }
        if let Some(salary) = changes.salary { am.salary = Set(salary); }
        if let Some(date) = changes.date_of_joining { am.date_of_joining = Set(date); }
        if let Some(status) = changes.status { am.status = Set(status); }
        am.updated_at = Set(Utc::now().into());
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = employee::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
