pub mod city;
pub mod selector;
pub mod trip;
