mod login;
mod signed_in;

pub use login::LoginPage;
pub use signed_in::SignedIn;
