//! Binding scenarios run against an in-process stub library


mod library_calls;
