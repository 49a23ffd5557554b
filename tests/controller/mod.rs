mod ship;
