pub mod appointment_table;
