mod alu;
mod generic;
mod jump;
