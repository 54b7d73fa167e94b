pub mod waitlist_category;
pub mod waitlist_entry;
