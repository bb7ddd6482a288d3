mod contact_get;
mod health_check;
mod helpers;
