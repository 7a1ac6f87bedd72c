mod respond;
