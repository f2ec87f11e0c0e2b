// reserve-client/tests/api_integration.rs
// REST contract tests against a mock backend

use reserve_client::{
    Booking, ClientConfig, ClientError, Customer, ReservationApi, ReservationClient, Table, TimeSlot,
};
use serde_json::json;
use shared::models::BookingDraft;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ReservationClient {
    ClientConfig::new(format!("{}/api", server.uri()))
        .build_api()
        .unwrap()
}

fn scenario_draft() -> BookingDraft {
    BookingDraft {
        customer_id: 3,
        table_id: 5,
        booking_slot_id: 2,
        booking_date: "2025-06-01".into(),
        number_of_people: 4,
        special_request: String::new(),
    }
}

#[tokio::test]
async fn test_list_bookings_coerces_references() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Booking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "bookingNumber": 1001,
                "customerId": "3",
                "tableId": 5,
                "bookingSlotId": "2",
                "bookingDate": "2025-06-01",
                "numberOfPeople": 4,
                "specialRequest": "Window seat",
                "isConfirmed": true
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let bookings: Vec<Booking> = api.list().await.unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].customer_id, 3);
    assert_eq!(bookings[0].booking_slot_id, 2);
    assert_eq!(bookings[0].special_request, "Window seat");
}

#[tokio::test]
async fn test_create_booking_sends_wire_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Booking"))
        .and(body_json(json!({
            "id": 0,
            "customerId": 3,
            "tableId": 5,
            "bookingSlotId": 2,
            "bookingDate": "2025-06-01",
            "numberOfPeople": 4,
            "specialRequest": "",
            "isConfirmed": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "bookingNumber": 5012,
            "customerId": 3,
            "tableId": 5,
            "bookingSlotId": 2,
            "bookingDate": "2025-06-01",
            "numberOfPeople": 4,
            "specialRequest": "",
            "isConfirmed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let created = api.create(&scenario_draft().into_booking()).await.unwrap();

    assert_eq!(created.id, Some(12));
    assert_eq!(created.booking_number, Some(5012));
}

#[tokio::test]
async fn test_update_puts_identity_in_body() {
    let server = MockServer::start().await;
    let expected = json!({
        "id": 17,
        "customerId": 3,
        "tableId": 5,
        "bookingSlotId": 2,
        "bookingDate": "2025-06-01",
        "numberOfPeople": 4,
        "specialRequest": "",
        "isConfirmed": true
    });
    Mock::given(method("PUT"))
        .and(path("/api/Booking"))
        .and(body_json(expected.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(expected))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let updated = api.update(17, scenario_draft().into_booking()).await.unwrap();
    assert_eq!(updated.id, Some(17));
}

#[tokio::test]
async fn test_table_update_carries_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/Table"))
        .and(body_json(json!({ "id": 4, "tableNumber": "T-4", "numberOfSeats": 6 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 4, "tableNumber": "T-4", "numberOfSeats": 6 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let table = api.update(4, Table::new("T-4", 6)).await.unwrap();
    assert_eq!(table.id, Some(4));
}

#[tokio::test]
async fn test_create_customer_omits_missing_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Customer"))
        .and(body_json(json!({
            "name": "Ada",
            "phoneNumber": "555-0100",
            "email": "ada@example.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "name": "Ada",
            "phoneNumber": "555-0100",
            "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let customer = api
        .create(&Customer::new("Ada", "555-0100", "ada@example.com"))
        .await
        .unwrap();
    assert_eq!(customer.id, Some(1));
}

#[tokio::test]
async fn test_delete_uses_id_path_and_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/TimeSlot/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    api.delete::<TimeSlot>(7).await.unwrap();
}

#[tokio::test]
async fn test_failures_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Customer"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/Booking/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;

    let err = api.list::<Customer>().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, ref message } if message == "boom"));

    let err = api.delete::<Booking>(99).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Table"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.list::<Table>().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_customer_bookings_never_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Booking/customer/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Booking/customer/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "none" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Booking/customer/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 8,
                "customerId": 3,
                "tableId": 1,
                "bookingSlotId": 1,
                "bookingDate": "2025-06-01",
                "numberOfPeople": 2,
                "isConfirmed": true
            }
        ])))
        .mount(&server)
        .await;

    let api = client_for(&server).await;

    assert!(api.list_bookings_by_customer(1).await.is_empty());
    assert!(api.list_bookings_by_customer(2).await.is_empty());

    let bookings = api.list_bookings_by_customer(3).await;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].special_request, "");
}

#[tokio::test]
async fn test_customer_bookings_survive_unreachable_backend() {
    // Nothing listens on the discard port
    let api = ClientConfig::new("http://127.0.0.1:9/api")
        .with_timeout(2)
        .build_api()
        .unwrap();
    assert!(api.list_bookings_by_customer(1).await.is_empty());
}
