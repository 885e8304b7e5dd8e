mod coords;
