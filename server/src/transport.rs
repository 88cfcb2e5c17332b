use mirra_shared::ReplicationEvent;

// ClientKey
//
// Handle for one connected client, allocated by the transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ClientKey(u64);

impl ClientKey {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

/// Outbound half of the transport as the server sees it.
///
/// Delivery is reliable and ordered per connection; connection enumeration
/// and lifetime are the transport's concern, so `broadcast` reaches
/// whatever set of clients is connected at call time.
pub trait ServerTransport {
    /// Sends one event to every connected client.
    fn broadcast(&mut self, event: ReplicationEvent);
    /// Sends one event to a single client.
    fn send(&mut self, client: ClientKey, event: ReplicationEvent);
}
