use aws_sdk_s3::Client;

use crate::session::Session;


/// get an S3 client bound to the region and credentials of the session
pub fn client_for(session: &Session) -> Client {
    Client::new(session.config())
}

/// the region the client sends its requests to
pub fn client_region(client: &Client) -> Option<&str> {
    client.config().region().map(|region| region.as_ref())
}
