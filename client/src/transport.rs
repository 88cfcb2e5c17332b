/// Outbound half of the transport as the client sees it.
///
/// Inbound traffic does not appear here: the host's message handler feeds
/// received events straight into
/// [`ClientReplicator::receive`](crate::ClientReplicator::receive).
pub trait ClientTransport {
    /// Signals the server that this client has joined and wants the full
    /// state.
    fn send_ready(&mut self);
}
