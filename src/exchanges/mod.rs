pub mod latoken;
