pub mod authorizer_facade_impl;
