pub mod u001_payment_calculator;
