//! HTML rendering
//!
//! Pure functions from per-request view models to markup. Handlers build an
//! explicit view model for each request; nothing in here touches the
//! database or shares state across requests.

use crate::models::{Booking, Car};

/// Outcome banner shown above the booking form
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// View model for the home page
#[derive(Debug, Clone)]
pub struct HomePage {
    pub cars: Vec<Car>,
    pub banner: Option<Banner>,
}

/// View model for the admin bookings page
#[derive(Debug, Clone)]
pub struct AdminPage {
    pub bookings: Vec<Booking>,
}

const HOME_STYLE: &str = "body { font-family: Arial, sans-serif; margin: 40px; } \
.container { max-width: 800px; margin: 0 auto; } \
.section { margin-bottom: 30px; padding: 20px; border: 1px solid #ddd; border-radius: 5px; } \
.error { color: red; margin: 10px 0; } \
.success { color: green; margin: 10px 0; } \
table { width: 100%; border-collapse: collapse; } \
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; } \
input, button { padding: 8px; margin: 5px 0; }";

const ADMIN_STYLE: &str = "body { font-family: Arial, sans-serif; margin: 40px; } \
table { width: 100%; border-collapse: collapse; margin-top: 20px; } \
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; } \
.container { max-width: 1000px; margin: 0 auto; }";

/// Render the home page: available cars, booking form, outcome banner
pub fn render_home(page: &HomePage) -> String {
    let mut car_rows = String::new();
    if page.cars.is_empty() {
        car_rows.push_str("<tr><td colspan=\"2\">No cars available</td></tr>");
    } else {
        for car in &page.cars {
            let id = car.id.map(|id| id.to_string()).unwrap_or_default();
            car_rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(&id),
                escape_html(&car.name)
            ));
        }
    }

    let banner = match &page.banner {
        Some(Banner::Error(message)) => {
            format!("<div class=\"error\">{}</div>", escape_html(message))
        }
        Some(Banner::Success(message)) => {
            format!("<div class=\"success\">{}</div>", escape_html(message))
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Car Rental</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <h1>Car Rental System</h1>

        <div class="section">
            <h2>Available Cars</h2>
            <table>
                <thead>
                    <tr><th>ID</th><th>Name</th></tr>
                </thead>
                <tbody>
                    {car_rows}
                </tbody>
            </table>
        </div>

        <div class="section">
            <h2>Book a Car</h2>
            {banner}
            <form method="post" action="/book">
                <div>
                    <input type="text" name="name" placeholder="Your Name" required>
                </div>
                <div>
                    <input type="number" name="carId" placeholder="Car ID" required>
                </div>
                <div>
                    <input type="date" name="startDate" required>
                </div>
                <div>
                    <input type="date" name="endDate" required>
                </div>
                <button type="submit">Book Car</button>
            </form>
        </div>

        <div class="section">
            <a href="/admin/bookings">View All Bookings (Admin)</a>
        </div>
    </div>
</body>
</html>
"#,
        style = HOME_STYLE,
        car_rows = car_rows,
        banner = banner,
    )
}

/// Render the admin page: every booking, newest first
pub fn render_admin(page: &AdminPage) -> String {
    let mut booking_rows = String::new();
    if page.bookings.is_empty() {
        booking_rows.push_str("<tr><td colspan=\"6\">No bookings yet</td></tr>");
    } else {
        for booking in &page.bookings {
            booking_rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                booking.id,
                escape_html(&booking.customer_name),
                booking.car_id,
                escape_html(&booking.car_name),
                booking.start_date,
                booking.end_date,
            ));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Admin - Bookings</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <h1>All Bookings</h1>
        <a href="/">&larr; Back to Home</a>
        <table>
            <thead>
                <tr>
                    <th>ID</th>
                    <th>Customer</th>
                    <th>Car ID</th>
                    <th>Car Name</th>
                    <th>Start Date</th>
                    <th>End Date</th>
                </tr>
            </thead>
            <tbody>
                {booking_rows}
            </tbody>
        </table>
    </div>
</body>
</html>
"#,
        style = ADMIN_STYLE,
        booking_rows = booking_rows,
    )
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
