// reserve-admin/tests/catalog_workflow.rs
// Customer, table and time slot pages against the in-memory backend

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{seeded_api, Harness};
use reserve_admin::forms::{CustomerForm, TableForm, TimeSlotForm};
use reserve_admin::workflow::{CatalogWorkflow, DeleteOutcome, LoadState};
use reserve_admin::WorkflowError;
use reserve_client::InMemoryApi;
use serde_json::json;
use shared::models::{Customer, Table, TimeSlot};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn customers(h: &Harness) -> CatalogWorkflow<Customer, InMemoryApi> {
    CatalogWorkflow::new(h.api.clone(), h.notifier(), h.confirm())
}

fn tables(h: &Harness) -> CatalogWorkflow<Table, InMemoryApi> {
    CatalogWorkflow::new(h.api.clone(), h.notifier(), h.confirm())
}

fn slots(h: &Harness) -> CatalogWorkflow<TimeSlot, InMemoryApi> {
    CatalogWorkflow::new(h.api.clone(), h.notifier(), h.confirm())
}

#[tokio::test]
async fn test_create_customer() {
    let h = Harness::new(Arc::new(InMemoryApi::new()), &[]);
    let wf = customers(&h);
    wf.load().await.unwrap();
    assert_eq!(wf.title().await, "Add New Customer");

    let form = CustomerForm {
        name: "Grace".into(),
        phone_number: "555-0199".into(),
        email: "grace@example.com".into(),
    };
    let saved = wf.submit(form).await.unwrap();
    assert_eq!(saved.id, Some(1));

    let posts = h.api.calls_with_method("POST");
    assert_eq!(
        posts[0].body,
        Some(json!({
            "name": "Grace",
            "phoneNumber": "555-0199",
            "email": "grace@example.com"
        }))
    );
    assert_eq!(
        h.notifier.last().unwrap().description,
        "Customer created successfully"
    );
    assert_eq!(
        wf.rows(day()).await,
        vec![vec!["Grace", "555-0199", "grace@example.com"]]
    );
    assert_eq!(wf.snapshot().await.form, CustomerForm::default());
}

#[tokio::test]
async fn test_invalid_customer_email_stays_local() {
    let h = Harness::new(Arc::new(InMemoryApi::new()), &[]);
    let wf = customers(&h);
    h.api.clear_calls();

    let form = CustomerForm {
        name: "Grace".into(),
        phone_number: "555-0199".into(),
        email: "grace".into(),
    };
    let err = wf.submit(form).await.unwrap_err();
    assert_eq!(
        err.field_errors().unwrap().get("email"),
        Some("Invalid email address")
    );
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_update_table_uses_edited_identity() {
    let h = Harness::new(seeded_api(), &[]);
    let wf = tables(&h);
    wf.load().await.unwrap();

    let table = wf.find(1).await.unwrap();
    wf.begin_edit(&table, day()).await.unwrap();
    assert_eq!(wf.title().await, "Edit Table");
    assert_eq!(
        wf.snapshot().await.form,
        TableForm {
            table_number: "T-1".into(),
            number_of_seats: "4".into(),
        }
    );

    let updated = wf
        .submit(TableForm {
            table_number: "T-1".into(),
            number_of_seats: "6".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.id, Some(1));

    let puts = h.api.calls_with_method("PUT");
    assert_eq!(
        puts[0].body,
        Some(json!({ "id": 1, "tableNumber": "T-1", "numberOfSeats": 6 }))
    );
    assert_eq!(
        h.notifier.last().unwrap().description,
        "Table updated successfully"
    );

    let page = wf.snapshot().await;
    assert_eq!(page.editing, None);
    assert_eq!(page.items[0].number_of_seats, 6);
    assert_eq!(wf.title().await, "Add New Table");
}

#[tokio::test]
async fn test_time_slot_edit_round_trips_display_time() {
    let h = Harness::new(seeded_api(), &[]);
    let wf = slots(&h);
    wf.load().await.unwrap();

    let slot = wf.find(1).await.unwrap();
    wf.begin_edit(&slot, day()).await.unwrap();
    let form = wf.snapshot().await.form;
    assert_eq!(
        form,
        TimeSlotForm {
            slot_id: "A1".into(),
            time: "2:30 PM".into(),
        }
    );

    wf.submit(form).await.unwrap();
    let puts = h.api.calls_with_method("PUT");
    assert_eq!(puts[0].body.as_ref().unwrap()["time"], json!("14:30:00"));
    assert_eq!(
        h.notifier.last().unwrap().description,
        "Time slot updated successfully"
    );
    assert_eq!(wf.rows(day()).await, vec![vec!["A1", "2:30 PM"]]);
}

#[tokio::test]
async fn test_failed_save_notifies() {
    let api = seeded_api();
    api.fail_next("POST", "Table");
    let h = Harness::new(api, &[]);
    let wf = tables(&h);
    wf.load().await.unwrap();

    let form = TableForm {
        table_number: "T-2".into(),
        number_of_seats: "2".into(),
    };
    let err = wf.submit(form.clone()).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Client(_)));
    assert_eq!(h.notifier.last().unwrap().description, "Failed to save table");
    assert_eq!(wf.snapshot().await.form, form);
}

#[tokio::test]
async fn test_load_failure_keeps_previous_list() {
    let h = Harness::new(seeded_api(), &[]);
    let wf = slots(&h);
    wf.load().await.unwrap();

    h.api.fail_next("GET", "TimeSlot");
    assert!(wf.load().await.is_err());

    let page = wf.snapshot().await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(
        page.load_state,
        LoadState::Failed {
            message: "Failed to fetch time slots".into()
        }
    );
    assert_eq!(
        h.notifier.last().unwrap().description,
        "Failed to fetch time slots"
    );
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let h = Harness::new(seeded_api(), &[false, true]);
    let wf = customers(&h);
    wf.load().await.unwrap();
    let customer = wf.find(1).await.unwrap();

    assert_eq!(wf.delete(&customer).await.unwrap(), DeleteOutcome::Cancelled);
    assert!(h.api.calls_with_method("DELETE").is_empty());

    assert_eq!(wf.delete(&customer).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(h.api.calls_with_method("DELETE")[0].path, "Customer/1");
    assert!(wf.snapshot().await.items.is_empty());
    assert_eq!(
        h.confirm.prompts()[0],
        "Are you sure you want to delete this customer?"
    );
    assert_eq!(
        h.notifier.last().unwrap().description,
        "Customer deleted successfully"
    );
}

#[tokio::test]
async fn test_delete_unsaved_record_is_refused() {
    let h = Harness::new(seeded_api(), &[true]);
    let wf = slots(&h);
    h.api.clear_calls();

    let err = wf.delete(&TimeSlot::new("Z9", "")).await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::MissingIdentity {
            action: "delete",
            entity: "time slot"
        }
    ));
    assert!(h.api.calls().is_empty());
    assert!(h.notifier.last().unwrap().is_error());
}
