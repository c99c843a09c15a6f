//! Repository modules for database access
//!
//! This module contains the repository traits for the two stored entities,
//! their SQL and in-memory implementations, and the factories that build them.

pub mod calendar;
pub mod calendar_factory;
pub mod calendar_memory;
pub mod calendar_sql;
pub mod reservation;
pub mod reservation_factory;
pub mod reservation_memory;
pub mod reservation_sql;

// Re-export the repositories and factories for ease of use
pub use calendar::CalendarRepository;
pub use calendar_factory::CalendarRepositoryFactory;
pub use calendar_memory::MemoryCalendarRepository;
pub use calendar_sql::SqlCalendarRepository;
pub use reservation::ReservationRepository;
pub use reservation_factory::ReservationRepositoryFactory;
pub use reservation_memory::MemoryReservationRepository;
pub use reservation_sql::SqlReservationRepository;
