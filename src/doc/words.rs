/*!
# The Word Set

Every word the compiler accepts, and nothing else. Words are
case-sensitive and whitespace-delimited. Integer literals are
optionally-signed decimal; `-5` is a literal while a bare `-` is
subtraction. There are no comments.

## Defining words

`: name ... ;` compiles a new word. Definitions may call any word
defined before them, and a redefinition shadows the earlier one from
then on. `exit` compiles an early return from the middle of a
definition.

`variable name` creates a word that pushes the address of a cell
initialised to zero. Use `@` and `!` to read and write it.

```text
variable score
42 score !
score @
```

## Stack words

`dup drop swap over` rearrange the data stack. `>r` and `r>` move the
top cell to and from the return stack; a value parked with `>r` must
be taken back with `r>` before the surrounding word returns.

## Arithmetic and comparison

`+ - and or not` operate bitwise-or-arithmetically on the top cells.
`= > <` compare the two top cells and leave -1 for true, 0 for false.
`not` is the bitwise complement, so `0 not` is -1 and `-1 not` is 0,
but `5 not` is -6 rather than 0.

## Conditionals

`if ... then` runs its body when the flag popped by `if` is non-zero.
`if ... else ... then` chooses between two bodies.

```text
: judge 10 > if 1 else 0 then ;
```

## Loops

`begin ... until` repeats until the flag popped by `until` is
non-zero. `begin ... repeat` loops forever (pair it with `exit`).

`do ... loop` takes `limit start` and counts from `start` while below
`limit`; `i` pushes the current index, `i'` the limit, and `j` the
index of the enclosing loop. `+loop` pops a step instead of counting
by one.

```text
: doubles 5 0 do i dup + loop ;
: evens 10 0 do i 2 +loop ;
```

*/
