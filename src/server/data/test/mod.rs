mod soft_delete;
