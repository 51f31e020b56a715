pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
pub const TEST_JWT_EXPIRY_HOURS: i64 = 24;
pub const TEST_FRONTEND_URL: &str = "http://localhost:5173";
pub const TEST_GOOGLE_CLIENT_ID: &str = "test-client-id";
pub const TEST_GOOGLE_CLIENT_SECRET: &str = "test-client-secret";
pub const TEST_GOOGLE_CALLBACK_URL: &str = "http://localhost:3000/api/auth/google/callback";
