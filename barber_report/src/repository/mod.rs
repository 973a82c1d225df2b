pub mod scheduling_repository_impl;
