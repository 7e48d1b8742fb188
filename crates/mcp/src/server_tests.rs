use super::*;

use std::path::PathBuf;

use serde_json::Value;

fn temp_server() -> (EmployeeMcp, PathBuf) {
    let path = std::env::temp_dir().join(format!("mcp_employees_{}.json", uuid::Uuid::new_v4()));
    (EmployeeMcp::new(Arc::new(EmployeeFileStore::new(&path))), path)
}

fn text_of(result: &CallToolResult) -> Value {
    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .unwrap_or_default();
    serde_json::from_str(text).unwrap()
}

fn create_params(name: &str, phone: &str) -> CreateEmployeeParams {
    CreateEmployeeParams {
        name: name.into(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: phone.into(),
        role: None,
        department: None,
        salary: None,
        date_of_joining: None,
        status: None,
    }
}

#[test]
fn sanitize_internal_error_hides_error_details() {
    let error = sanitize_internal_error("disk full at /secret/path", "List employees");
    let message = error.to_string();
    assert!(message.contains("List employees failed"));
    assert!(!message.contains("/secret/path"));
}

#[tokio::test]
async fn create_applies_defaults_without_phone_check() -> anyhow::Result<()> {
    let (server, path) = temp_server();
    let result = server.create_employee(Parameters(create_params("Ann", "12"))).await?;
    let created = text_of(&result);
    assert_eq!(created["id"], 1);
    assert_eq!(created["phone"], "12");
    assert_eq!(created["salary"], 0.0);
    assert_eq!(created["status"], "Active");
    assert_eq!(created["department"], "");

    let mut params = create_params("Bob", "5551234567");
    params.status = Some(String::new());
    let bob = text_of(&server.create_employee(Parameters(params)).await?);
    assert_eq!(bob["id"], 2);
    assert_eq!(bob["status"], "Active");
    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_status() {
    let (server, path) = temp_server();
    let mut params = create_params("Ann", "5551234567");
    params.status = Some("Retired".into());
    let err = server.create_employee(Parameters(params)).await.unwrap_err();
    assert!(err.to_string().contains("status must be"));
    let list = server.list_employees(Parameters(ListEmployeesParams {})).await.unwrap();
    assert_eq!(text_of(&list), serde_json::json!([]));
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn list_reflects_created_records() -> anyhow::Result<()> {
    let (server, path) = temp_server();
    server.create_employee(Parameters(create_params("Ann", "1"))).await?;
    server.create_employee(Parameters(create_params("Bob", "2"))).await?;
    let list = text_of(&server.list_employees(Parameters(ListEmployeesParams {})).await?);
    let names: Vec<&str> = list.as_array().unwrap().iter().filter_map(|e| e["name"].as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);
    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn delete_reports_outcome_in_payload() -> anyhow::Result<()> {
    let (server, path) = temp_server();
    server.create_employee(Parameters(create_params("Ann", "1"))).await?;

    let missing = text_of(&server.delete_employee(Parameters(DeleteEmployeeParams { employee_id: 9 })).await?);
    assert_eq!(missing, serde_json::json!({"success": false, "message": "Employee not found"}));

    let done = text_of(&server.delete_employee(Parameters(DeleteEmployeeParams { employee_id: 1 })).await?);
    assert_eq!(done, serde_json::json!({"success": true, "message": "Employee 1 deleted"}));
    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[test]
fn server_info_enables_tools() {
    let (server, _path) = temp_server();
    let info = server.get_info();
    assert!(info.capabilities.tools.is_some());
}
