pub mod banklink;
