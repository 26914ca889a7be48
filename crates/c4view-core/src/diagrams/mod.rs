pub mod c4;
