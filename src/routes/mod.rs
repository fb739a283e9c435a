pub mod health;
pub mod superdashboard;
