//! Booking flow integration tests
//!
//! Drives the booking form end to end: submission, availability flip,
//! error banners, and the admin ledger view.

use carrental_webui::db::{BookingRepository, CarRepository};

use crate::common::TestApp;

#[tokio::test]
async fn test_successful_booking_shows_confirmation() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/book",
            "name=Alice&carId=1&startDate=2024-01-05&endDate=2024-01-10",
        )
        .await;

    response.assert_ok();
    assert!(response.text().contains("Booking successful for Honda City"));
}

#[tokio::test]
async fn test_booked_car_disappears_from_home() {
    let app = TestApp::new().await;

    app.post_form(
        "/book",
        "name=Alice&carId=1&startDate=2024-01-05&endDate=2024-01-10",
    )
    .await
    .assert_ok();

    let home = app.get("/").await;
    home.assert_ok();

    let html = home.text();
    assert!(!html.contains("Honda City"));
    assert!(html.contains("Maruti Swift"));

    let cars = CarRepository::new(&app.state.db);
    let car = cars.find_by_id(1).await.unwrap().unwrap();
    assert!(!car.available);
}

#[tokio::test]
async fn test_inverted_date_range_shows_error_with_car_list() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/book",
            "name=Alice&carId=1&startDate=2024-01-10&endDate=2024-01-05",
        )
        .await;

    // The form re-renders as a normal page with the error banner and the
    // unchanged car list.
    response.assert_ok();
    let html = response.text();
    assert!(html.contains("Start date must be before or equal to end date"));
    assert!(html.contains("Honda City"));

    let bookings = BookingRepository::new(&app.state.db);
    assert!(bookings.list_all_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_car_shows_error() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/book",
            "name=Alice&carId=99&startDate=2024-01-05&endDate=2024-01-10",
        )
        .await;

    response.assert_ok();
    assert!(response.text().contains("Car not found"));

    let bookings = BookingRepository::new(&app.state.db);
    assert!(bookings.list_all_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_date_shows_error_without_booking() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/book",
            "name=Alice&carId=1&startDate=notadate&endDate=2024-01-10",
        )
        .await;

    response.assert_ok();
    assert!(response.text().contains("Invalid date"));

    let bookings = BookingRepository::new(&app.state.db);
    assert!(bookings.list_all_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_name_shows_error_without_booking() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/book",
            "name=&carId=1&startDate=2024-01-05&endDate=2024-01-10",
        )
        .await;

    response.assert_ok();
    assert!(response.text().contains("Name is required"));

    let bookings = BookingRepository::new(&app.state.db);
    assert!(bookings.list_all_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_lists_bookings_newest_first() {
    let app = TestApp::new().await;

    app.post_form(
        "/book",
        "name=Alice&carId=1&startDate=2024-01-05&endDate=2024-01-10",
    )
    .await
    .assert_ok();
    app.post_form(
        "/book",
        "name=Bob&carId=2&startDate=2024-02-01&endDate=2024-02-03",
    )
    .await
    .assert_ok();

    let response = app.get("/admin/bookings").await;
    response.assert_ok();

    let html = response.text();
    assert!(html.contains("Alice"));
    assert!(html.contains("Bob"));
    // Bob booked last, so his row comes first
    let bob_pos = html.find("Bob").unwrap();
    let alice_pos = html.find("Alice").unwrap();
    assert!(bob_pos < alice_pos);
}

#[tokio::test]
async fn test_same_car_can_be_booked_twice() {
    let app = TestApp::new().await;

    app.post_form(
        "/book",
        "name=Alice&carId=1&startDate=2024-01-05&endDate=2024-01-10",
    )
    .await
    .assert_ok();

    let response = app
        .post_form(
            "/book",
            "name=Bob&carId=1&startDate=2024-01-07&endDate=2024-01-12",
        )
        .await;

    // No availability re-check on submission, so the second booking for the
    // same car also succeeds.
    response.assert_ok();
    assert!(response.text().contains("Booking successful for Honda City"));

    let bookings = BookingRepository::new(&app.state.db)
        .list_all_newest_first()
        .await
        .unwrap();
    assert_eq!(bookings.len(), 2);
}

#[tokio::test]
async fn test_booking_escapes_customer_supplied_markup() {
    let app = TestApp::new().await;

    app.post_form(
        "/book",
        "name=%3Cscript%3Ealert(1)%3C%2Fscript%3E&carId=1&startDate=2024-01-05&endDate=2024-01-10",
    )
    .await
    .assert_ok();

    let admin = app.get("/admin/bookings").await;
    admin.assert_ok();

    let html = admin.text();
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}
