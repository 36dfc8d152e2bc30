mod find_by_id;
