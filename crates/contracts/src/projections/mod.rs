pub mod p910_admin_payments;
