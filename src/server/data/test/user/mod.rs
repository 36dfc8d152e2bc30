mod find_by_email;
mod insert;
