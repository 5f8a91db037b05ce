pub mod stub_server;
pub mod txt_responder;

pub use stub_server::{HickoryStubResolver, StubDnsServer};
pub use txt_responder::TxtRequestHandler;
