use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use migration::MigratorTrait;
use service::employee::{EmployeeQuery, EmployeeService, NewEmployee, SeaOrmEmployeeRepository};
use service::file::{EmployeeDraft, EmployeeFileStore};
use service::pagination::Pagination;

fn bench_relational_list(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = rt.block_on(async {
        let db = models::db::connect_with_config(&configs::DatabaseConfig::in_memory()).await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let svc = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(db)));
        // seed outside of the measured loop
        for i in 0..500 {
            let input = NewEmployee {
                name: format!("Bench {i}"),
                email: format!("bench{i}@example.com"),
                phone: "5551234567".into(),
                role: None,
                department: Some(if i % 2 == 0 { "Engineering".into() } else { "Sales".into() }),
                salary: None,
                date_of_joining: None,
                status: None,
            };
            svc.create(input).await.unwrap();
        }
        svc
    });

    let query = EmployeeQuery {
        pagination: Pagination { page: 3, page_size: 20 },
        search: Some("bench1".into()),
        department: Some("Engineering".into()),
        status: Some("Active".into()),
    };
    c.bench_function("employee_list_filtered_page", |b| {
        b.iter(|| rt.block_on(svc.list(&query)).unwrap());
    });
}

fn bench_file_list(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let path = std::env::temp_dir().join(format!("employee_bench_{}.json", uuid::Uuid::new_v4()));
    let store = EmployeeFileStore::new(&path);
    rt.block_on(async {
        for i in 0..500 {
            let draft = EmployeeDraft { name: format!("Bench {i}"), email: "bench@example.com".into(), ..Default::default() };
            store.append(draft).await.unwrap();
        }
    });

    c.bench_function("employee_file_list", |b| {
        b.iter(|| rt.block_on(store.list()).unwrap());
    });
    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_relational_list, bench_file_list);
criterion_main!(benches);
