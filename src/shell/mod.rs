// Composition root for the payments service.
//
// Responsibilities
// - Instantiate the payment store with its seed data.
// - Wire the store into the use case handlers through AppState.
// - Expose the HTTP router to the binary.

pub mod http;
pub mod state;
