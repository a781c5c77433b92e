pub mod authorizer_facade;
