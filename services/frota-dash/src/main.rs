// services/frota-dash/src/main.rs
//
// Frota Dashboard - fleet management reports
//
// Run with: trunk serve   (http://localhost:5173)
//

fn main() {
    frota_dash::start();
}
