/// Generation counter for album selections. Each selection takes a ticket;
/// a fetch finishing after a newer selection holds a stale ticket and its
/// result is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlbumSelection {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

impl AlbumSelection {
    pub fn begin(&mut self) -> SelectionTicket {
        self.generation = self.generation.wrapping_add(1);
        SelectionTicket(self.generation)
    }

    pub fn is_current(&self, ticket: SelectionTicket) -> bool {
        ticket.0 == self.generation
    }
}
