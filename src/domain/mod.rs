mod connectivity;

pub use connectivity::ConnectivityResult;
